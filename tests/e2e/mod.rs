// End-to-end tests for the CineVoice Backend API
//
// Each test spawns the full axum application on an ephemeral port with a stub
// speech provider in place of Gemini, then talks to it over real HTTP.

mod test_download;
mod test_health;
mod test_tts;
