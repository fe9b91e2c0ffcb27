mod session;

pub use session::{FormulationSession, SessionConfig};
