//! Single-stream HTTP GET into a temp download file.
//!
//! Writes the response body sequentially as it arrives. No Range requests,
//! no retries; a failed transfer is reported and the caller discards the
//! temp file.

use super::error::FetchError;
use crate::storage::TempDownload;
use std::time::Duration;

/// Curl transfer knobs taken from config.
#[derive(Debug, Clone)]
pub struct GetOptions {
    pub connect_timeout: Duration,
    pub transfer_timeout: Duration,
    pub user_agent: String,
}

/// Downloads `url` with a single GET, appending the body to `temp`.
/// Returns the number of bytes written.
pub fn download_to(url: &str, temp: &mut TempDownload, opts: &GetOptions) -> Result<u64, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.transfer_timeout)?;
    // Abort transfers that stall below 1 KiB/s for a minute.
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    let mut written: u64 = 0;
    let mut write_error: Option<std::io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match temp.append(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    if let Err(e) = performed {
        // A curl "write error" here really means our append failed.
        if let Some(io) = write_error {
            return Err(FetchError::Storage(io));
        }
        return Err(FetchError::Curl(e));
    }

    let code = easy.response_code()?;
    // Non-HTTP protocols (e.g. file://) report 0; anything else must be 2xx.
    if code != 0 && !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(written)
}
