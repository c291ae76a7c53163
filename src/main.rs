use ytt_rs::client::TranscriptClient;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Read url and optional language code from args
    let url = std::env::args().nth(1).expect("No url provided");
    let language = std::env::args().nth(2).unwrap_or_else(|| "en".to_string());

    let client = TranscriptClient::new(&language).expect("Could not create client");

    let title = client
        .get_video_title(&url)
        .await
        .expect("Could not fetch video title");
    println!("# {}", title);

    let transcript = client
        .get_transcript(&url)
        .await
        .expect("Could not fetch transcript");

    for segment in &transcript {
        println!("[{}] {}", segment.start, segment.text);
    }
}
