/// Body message of the region proxy failure envelope
pub const PROXY_FAILURE_MESSAGE: &str = "Internal Server Error";

// =============================================================================
// NOTICE MESSAGES
// =============================================================================

pub const NOTICE_CREATE_SUCCESS: &str = "Berhasil Menambahkan Data";
pub const NOTICE_CREATE_FAILURE: &str = "Gagal Menambahkan Data";
pub const NOTICE_UPDATE_SUCCESS: &str = "Berhasil Mengedit Data";
pub const NOTICE_UPDATE_FAILURE: &str = "Gagal Mengedit Data";
