//! Round-trip a composite value through a stream and print the wire bytes.
//!
//! Usage:
//!   cargo run -p bridge-stream --example match_info
//!   RUST_LOG=bridge_stream=debug cargo run -p bridge-stream --example match_info
//!
//! The second form also shows the library's debug events for the truncated
//! read at the end.

use bridge_stream::{Result, Stream, StreamSerializer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct MatchInfo {
    match_id: i32,
    player_ids: Vec<i32>,
    player_names: Vec<String>,
}

impl StreamSerializer for MatchInfo {
    fn write_to(&self, stream: &mut Stream) -> Result<()> {
        stream.write_int(self.match_id);
        stream.write_int_array(&self.player_ids)?;
        stream.write_string_array(&self.player_names)
    }

    fn read_from(&mut self, stream: &mut Stream) -> Result<()> {
        self.match_id = stream.read_int()?;
        self.player_ids = stream.read_int_array()?;
        self.player_names = stream.read_string_array()?;
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    let sent = MatchInfo {
        match_id: 1231,
        player_ids: vec![1, 2],
        player_names: vec!["rufus".into(), "dufus".into()],
    };

    let mut stream = Stream::new();
    stream.write(&sent)?;
    let wire = stream.into_bytes();
    info!(len = wire.len(), hex = %hex::encode(&wire), "encoded match");

    let mut received = Stream::from_bytes(wire.clone());
    let got: MatchInfo = received.read_new()?;
    info!(?got, matches = (got == sent), "decoded match");

    // Drop the last byte to show how a truncated payload is reported.
    let mut short = Stream::from_bytes(&wire[..wire.len() - 1]);
    if let Err(e) = short.read_new::<MatchInfo>() {
        warn!(%e, "truncated payload rejected");
    }
    Ok(())
}
