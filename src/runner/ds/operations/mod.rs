pub mod lex_env;
pub mod test_and_comparison;
