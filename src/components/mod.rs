mod knob;

pub use knob::Knob;
