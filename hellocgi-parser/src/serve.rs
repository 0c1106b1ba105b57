use crate::{
    config::Config,
    render::{PageContext, format_timestamp, render_page},
    request::CgiRequest,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use std::{fmt::Display, io::Write};
use tracing::debug;

impl PageContext {
    #[must_use]
    pub fn from_request(request: &CgiRequest, config: &Config, now: &NaiveDateTime) -> Self {
        let params = request.params();
        debug!(
            method = %request.method,
            path = %request.path_info,
            params = params.len(),
            "handling request"
        );
        Self {
            name: params.get_or("name", &config.greeting.default_name).to_string(),
            method: request.method.clone(),
            timestamp: format_timestamp(now),
            path: request.path_info.clone(),
        }
    }
}

pub fn serve_request(request: &CgiRequest, config: &Config, now: &NaiveDateTime) -> Result<String> {
    let ctx = PageContext::from_request(request, config, now);
    render_page(&ctx, &config.greeting.title)
}

/// Renders the page for `request` at the current local time.
pub fn serve_content(request: &CgiRequest, config: &Config) -> Result<String> {
    serve_request(request, config, &Local::now().naive_local())
}

/// Writes a CGI response: the content type header, a blank line, then the page.
pub fn write_response<W: Write>(out: &mut W, page: &str) -> Result<()> {
    write!(out, "Content-Type: text/html\n\n{page}")?;
    out.flush()?;
    Ok(())
}

pub fn write_error_response<W: Write, E: Display>(out: &mut W, err: E) -> Result<()> {
    write!(
        out,
        "Status: 500 Internal Server Error\nContent-Type: text/plain\n\nInternal Server Error: {err}\n"
    )?;
    out.flush()?;
    Ok(())
}
