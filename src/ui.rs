//! 検索結果の表示 (テキスト / JSON)

use crate::error::Result;
use crate::registry::Microphone;
use crate::search::{MicrophoneList, SearchOutcome};

/// 1 台分を表示する
pub fn print_microphone(mic: &Microphone) {
    println!("Microphone found - {mic}");
}

/// 複数台をまとめて表示する
pub fn print_microphones(mics: &[Microphone]) {
    println!("{}", MicrophoneList(mics));
}

pub fn print_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found { microphone } => print_microphone(microphone),
        SearchOutcome::Matches { microphones } => print_microphones(microphones),
        not_found => println!("{not_found}"),
    }
}

pub fn render_json(outcome: &SearchOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
