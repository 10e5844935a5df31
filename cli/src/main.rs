use clap::{Parser, Subcommand};
use phuket_condo_core::submission::{ACCEPT_JSON, FORM_CONTENT_TYPE};
use phuket_condo_core::{
    check_status, classify_video_url, head_html, normalize_embed_url, page_meta, player_src,
    product_json_ld, ContactField, ContactForm, LeadPayload, PlaybackOptions, SubmitError,
    ViewportClass, CONTACTS, LISTING, PHOTOS, SITE, VIDEO,
};

#[derive(Parser)]
#[command(name = "phuket-condo-cli", version, about = "Tools for the phuket-condo listing page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a video link is classified and embedded.
    Embed {
        /// Defaults to the listing video.
        url: Option<String>,
        #[arg(long)]
        desktop: bool,
        #[arg(long)]
        unmuted: bool,
    },
    /// Print the static `<head>` markup for the listing.
    Head,
    /// Post a lead to the form relay the same way the page does.
    SendTestLead {
        #[arg(long, env = "FORM_ENDPOINT", default_value = CONTACTS.form_endpoint)]
        endpoint: String,
        #[arg(long, default_value = "Test lead")]
        name: String,
        #[arg(long, default_value = "cli@example.com")]
        contact: String,
        #[arg(long, default_value = "Sent from phuket-condo-cli")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Embed {
            url,
            desktop,
            unmuted,
        } => {
            let url = url.unwrap_or_else(|| VIDEO.url.to_string());
            print!("{}", embed_report(&url, desktop, !unmuted));
        }
        Commands::Head => {
            let meta = page_meta(&SITE);
            let json_ld = product_json_ld(&LISTING, &SITE, PHOTOS);
            println!("{}", head_html(&meta, &json_ld));
        }
        Commands::SendTestLead {
            endpoint,
            name,
            contact,
            message,
        } => {
            let mut form = ContactForm::new(CONTACTS.form_subject);
            form.set_field(ContactField::Name, name);
            form.set_field(ContactField::Contact, contact);
            form.set_field(ContactField::Message, message);
            if let Some(field) = form.fields().first_missing() {
                eprintln!("missing field: {}", field.key());
                return Ok(());
            }
            let Some(payload) = form.begin_submit() else {
                eprintln!("form not ready: {}", form.status().label());
                return Ok(());
            };
            println!("endpoint: {endpoint}");
            println!("status: {}", form.status().label());
            let client = reqwest::Client::new();
            let outcome = send_lead(&client, &endpoint, &payload).await;
            if let Err(err) = &outcome {
                eprintln!("error: {err}");
            }
            form.finish(outcome);
            println!("status: {}", form.status().label());
        }
    }

    Ok(())
}

fn embed_report(url: &str, desktop: bool, muted: bool) -> String {
    let kind = classify_video_url(url)
        .map(|link| link.kind())
        .unwrap_or("unrecognized");
    let viewport = if desktop {
        ViewportClass::Desktop
    } else {
        ViewportClass::Mobile
    };
    let src = player_src(url, PlaybackOptions::new(viewport, muted));
    format!(
        "kind: {kind}\nembed: {}\nplayer ({}): {src}\n",
        normalize_embed_url(url),
        viewport.label()
    )
}

async fn send_lead(
    client: &reqwest::Client,
    endpoint: &str,
    payload: &LeadPayload,
) -> Result<(), SubmitError> {
    let response = client
        .post(endpoint)
        .header(reqwest::header::ACCEPT, ACCEPT_JSON)
        .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(payload.to_form_body())
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    check_status(response.status().as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phuket_condo_core::SubmitStatus;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accepts one request, answers with `status`, and returns the raw request.
    async fn one_shot_relay(status: u16) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.expect("read");
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(split) = text.find("\r\n\r\n") {
                    let length = text[..split]
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|value| value.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if raw.len() >= split + 4 + length {
                        break;
                    }
                }
            }
            let reply = format!(
                "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{{}}"
            );
            socket.write_all(reply.as_bytes()).await.expect("write");
            String::from_utf8_lossy(&raw).into_owned()
        });
        (format!("http://{addr}/f/test"), handle)
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new("New lead");
        form.set_field(ContactField::Name, "Anna");
        form.set_field(ContactField::Contact, "+66 80 000 0000");
        form.set_field(ContactField::Message, "Viewing on Friday?");
        form
    }

    #[test]
    fn embed_report_lists_kind_and_sources() {
        let report = embed_report("https://youtu.be/abc123", true, true);
        assert!(report.contains("kind: "));
        assert!(report.contains("embed: https://www.youtube.com/embed/abc123"));
        assert!(report.contains("autoplay=1"));
        assert!(report.contains("mute=1"));
    }

    #[test]
    fn embed_report_flags_unknown_links() {
        let report = embed_report("https://vimeo.com/1", false, true);
        assert!(report.contains("kind: unrecognized"));
        assert!(report.contains("embed: https://vimeo.com/1"));
    }

    #[tokio::test]
    async fn lead_is_posted_as_form_body() {
        let (endpoint, relay) = one_shot_relay(200).await;
        let mut form = filled_form();
        let payload = form.begin_submit().expect("payload");
        let outcome = send_lead(&reqwest::Client::new(), &endpoint, &payload).await;
        assert!(outcome.is_ok());
        form.finish(outcome);
        assert_eq!(form.status(), SubmitStatus::Success);

        let raw = relay.await.expect("relay").to_ascii_lowercase();
        assert!(raw.starts_with("post /f/test"));
        assert!(raw.contains("accept: application/json"));
        assert!(raw.contains("content-type: application/x-www-form-urlencoded"));
        assert!(raw.contains("name=anna"));
        assert!(raw.contains("_subject=new+lead"));
    }

    #[tokio::test]
    async fn relay_rejection_keeps_fields_for_retry() {
        let (endpoint, relay) = one_shot_relay(422).await;
        let mut form = filled_form();
        let payload = form.begin_submit().expect("payload");
        let outcome = send_lead(&reqwest::Client::new(), &endpoint, &payload).await;
        assert!(matches!(outcome, Err(SubmitError::Status(422))));
        form.finish(outcome);
        assert!(form.can_submit());
        assert_eq!(form.fields().name, "Anna");
        relay.await.expect("relay");
    }
}
