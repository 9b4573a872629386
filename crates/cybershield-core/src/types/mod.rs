mod assessment;
mod breach;
mod display;
mod password;
mod score;
mod session;

pub use assessment::*;
pub use breach::*;
pub use display::*;
pub use password::*;
pub use score::*;
pub use session::*;
