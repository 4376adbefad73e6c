pub mod errors;
pub mod generator;
pub mod list_loader;
pub mod logo_checker;
pub mod retry;
pub mod token_fetcher;
pub mod token_files;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;
