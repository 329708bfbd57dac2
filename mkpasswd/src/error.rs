#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("password length must be at least 1")]
    ZeroLength,

    #[error("minimum character counts ({required}) exceed the password length ({length})")]
    MinimumsExceedLength { required: usize, length: usize },

    #[error("character exclusions leave the {pool} pool empty")]
    EmptyPool { pool: &'static str },

    #[error("no candidate satisfied the constraints after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}
