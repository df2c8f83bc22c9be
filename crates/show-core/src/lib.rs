pub mod config;
pub mod constants;
pub mod device;
pub mod feedback;
pub mod gesture;
pub mod notify;
pub mod performance;
pub mod session;
pub mod settings;
pub mod synth;
pub mod text;
pub mod timer;

pub use config::*;
pub use device::*;
pub use feedback::*;
pub use gesture::*;
pub use performance::*;
pub use session::*;
pub use settings::*;
pub use synth::*;
pub use text::*;
pub use timer::*;
