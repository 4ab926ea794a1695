mod present_val;

pub use present_val::PresentVal;
