use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits only, used for NIK and Nomor KK
    /// - Valid: "3273012345670001", "0012"
    /// - Invalid: "", "32-73", "3273 01", "12a"
    pub static ref NUMERIC_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// At least one non-whitespace character, used for required text fields
    /// - Valid: "Rina", " Jl. Dago ", "a"
    /// - Invalid: "", "   ", "\t\n"
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}
