/// Exit status for the two failures the tool recognizes (missing input, missing columns).
pub const EXIT_INPUT: u8 = 1;
/// Exit status for every other fault (malformed CSV, I/O, JSON).
pub const EXIT_RUNTIME: u8 = 2;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// The input CSV does not exist.
    pub fn input_missing(path: &std::path::Path) -> Self {
        Self::new(
            EXIT_INPUT,
            format!(
                "Error: {} not found\nPlease place the dataset in the working directory or pass --input.",
                path.display()
            ),
        )
    }

    /// One or more required columns could not be matched against the header.
    pub fn columns_missing(fields: &[&str]) -> Self {
        Self::new(
            EXIT_INPUT,
            format!(
                "Error: Cannot find required columns: {}\nRequired: ticker, environmental, social, governance scores",
                fields.join(", ")
            ),
        )
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(EXIT_RUNTIME, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
