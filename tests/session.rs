#[path = "session/corruption.rs"]
mod corruption;
#[path = "session/header.rs"]
mod header;
#[path = "session/lifecycle.rs"]
mod lifecycle;
