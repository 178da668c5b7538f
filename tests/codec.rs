#[path = "codec/reference_boundary.rs"]
mod reference_boundary;
#[path = "codec/sentinel.rs"]
mod sentinel;
