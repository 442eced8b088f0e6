//! Command-line client for the CodeShare API.
//!
//! Drives the same two flows as the browser client: load a snippet by id
//! (falling back to the default document when the server says no) and share
//! editor content under a freshly generated id.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use codeshare_core::models::snippet::{Language, SnippetBody};
use codeshare_core::slug::generate_snippet_id;
use codeshare_core::{EditorSession, DEFAULT_CLI_SERVER_URL};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "cshare", about = "CodeShare CLI", version)]
struct Cli {
    /// Server URL (can also be set via CS_SERVER env var)
    #[arg(short, long, env = "CS_SERVER")]
    server: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

/// clap-friendly wrapper for the closed language enum.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LanguageArg {
    Html,
    Javascript,
    Css,
    Typescript,
    Json,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Html => Language::Html,
            LanguageArg::Javascript => Language::Javascript,
            LanguageArg::Css => Language::Css,
            LanguageArg::Typescript => Language::Typescript,
            LanguageArg::Json => Language::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Fetch a shared snippet and print its code
    Get {
        id: String,
    },
    /// Share code under a new generated id and print the link
    Share {
        /// Read code from a file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
        /// Language tag for the snippet
        #[arg(short, long, value_enum, default_value = "html")]
        language: LanguageArg,
    },
}

fn error_message_for_response(status: reqwest::StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string();
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return value
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or(body)
            .to_string();
    }

    body.to_string()
}

async fn ensure_success_or_exit(res: reqwest::Response, action: &str) -> reqwest::Response {
    let status = res.status();
    if status.is_success() {
        return res;
    }

    let body = match res.text().await {
        Ok(body) => body,
        Err(err) => format!("failed to read error response body: {}", err),
    };
    let message = error_message_for_response(status, &body);
    eprintln!("{} failed ({}): {}", action, status, message);
    std::process::exit(1);
}

fn api_url(server: &str, segments: &[&str]) -> Result<reqwest::Url, String> {
    let mut url = reqwest::Url::parse(server)
        .map_err(|err| format!("Invalid server URL '{}': {}", server, err))?;
    let mut path = url
        .path_segments_mut()
        .map_err(|_| "Server URL cannot be used as an API base".to_string())?;
    path.pop_if_empty();
    for segment in segments {
        path.push(segment);
    }
    drop(path);
    Ok(url)
}

fn api_url_or_exit(server: &str, action: &str, segments: &[&str]) -> reqwest::Url {
    match api_url(server, segments) {
        Ok(url) => url,
        Err(message) => {
            eprintln!("{} failed: {}", action, message);
            std::process::exit(1);
        }
    }
}

fn normalize_server(server: String) -> String {
    if let Ok(mut url) = reqwest::Url::parse(&server) {
        let should_normalize_localhost =
            url.scheme().eq_ignore_ascii_case("http") && url.host_str() == Some("localhost");
        if should_normalize_localhost && url.set_host(Some("127.0.0.1")).is_err() {
            return server;
        }
        let mut normalized = url.to_string();
        while normalized.ends_with('/') {
            normalized.pop();
        }
        return normalized;
    }
    server
}

fn resolve_server(server: Option<String>) -> String {
    server
        .and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .unwrap_or_else(|| DEFAULT_CLI_SERVER_URL.to_string())
}

fn read_code_input(file: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        server,
        timeout,
        command,
    } = Cli::parse();

    if let Commands::Completions { shell } = &command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout))
        .build()?;
    let server = normalize_server(resolve_server(server));

    match command {
        Commands::Completions { .. } => unreachable!("completions handled before client setup"),
        Commands::Get { id } => {
            let endpoint = api_url_or_exit(&server, "Get", &["api", "snippets", id.as_str()]);
            // Any non-200 is the not-found fallback, mirroring the browser
            // client's redirect to the default document.
            let body = match client.get(endpoint).send().await {
                Ok(res) if res.status().is_success() => res.json::<SnippetBody>().await.ok(),
                Ok(res) => {
                    eprintln!("Get '{}' returned {}; using default document", id, res.status());
                    None
                }
                Err(err) => {
                    eprintln!("Get '{}' failed: {}; using default document", id, err);
                    None
                }
            };

            let session = EditorSession::from_load(&id, body);
            println!("{}", session.code());
        }
        Commands::Share { file, language } => {
            let code = read_code_input(file)?;
            let mut session = EditorSession::fresh();
            session.set_code(code);
            session.set_language(language.into());

            let id = generate_snippet_id();
            let endpoint = api_url_or_exit(&server, "Share", &["api", "snippets", id.as_str()]);
            let res = client.post(endpoint).json(&session.body()).send().await?;
            ensure_success_or_exit(res, "Share").await;

            session.share_succeeded(id);
            println!("{}{}", server, session.path());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_segments_to_base() {
        let url = api_url("http://127.0.0.1:5050", &["api", "snippets", "abc_1"])
            .expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:5050/api/snippets/abc_1");
    }

    #[test]
    fn api_url_handles_trailing_slash_base() {
        let url = api_url("http://127.0.0.1:5050/", &["api", "snippets", "abc_1"])
            .expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:5050/api/snippets/abc_1");
    }

    #[test]
    fn normalize_server_rewrites_localhost_and_strips_slashes() {
        assert_eq!(
            normalize_server("http://localhost:5050/".to_string()),
            "http://127.0.0.1:5050"
        );
    }

    #[test]
    fn resolve_server_falls_back_to_default() {
        assert_eq!(resolve_server(None), DEFAULT_CLI_SERVER_URL);
        assert_eq!(resolve_server(Some("  ".to_string())), DEFAULT_CLI_SERVER_URL);
        assert_eq!(
            resolve_server(Some("http://10.0.0.2:5050".to_string())),
            "http://10.0.0.2:5050"
        );
    }

    #[test]
    fn error_message_prefers_json_error_field() {
        let message = error_message_for_response(
            reqwest::StatusCode::CONFLICT,
            r#"{"error": "Snippet id 'x' already exists"}"#,
        );
        assert_eq!(message, "Snippet id 'x' already exists");
    }

    #[test]
    fn error_message_falls_back_to_status_reason() {
        let message = error_message_for_response(reqwest::StatusCode::NOT_FOUND, "  ");
        assert_eq!(message, "Not Found");
    }
}
