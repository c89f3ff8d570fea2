/// Lead intake endpoint, fixed at build time.
///
/// `LEAD_API_URL` set while compiling wins; otherwise debug builds talk to a
/// locally running relay and release builds post to the serving origin.
pub fn get_lead_api_url() -> &'static str {
    match option_env!("LEAD_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => default_lead_api_url(),
    }
}

#[cfg(debug_assertions)]
fn default_lead_api_url() -> &'static str {
    "http://localhost:5000/api/submit"  // Development URL when running the relay locally
}

#[cfg(not(debug_assertions))]
fn default_lead_api_url() -> &'static str {
    "/api/submit"
}
