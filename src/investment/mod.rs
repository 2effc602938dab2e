//! 투자 시나리오(로컬 vs 클라우드)의 TCO/ROI/회수기간/민감도 계산 모듈 모음.

pub mod bounds;
pub mod calculator;
pub mod comparison;
pub mod payback;
pub mod roi;
pub mod scenario;
pub mod sensitivity;
pub mod tco;

pub use bounds::*;
pub use calculator::*;
pub use comparison::*;
pub use payback::*;
pub use roi::*;
pub use scenario::*;
pub use sensitivity::*;
pub use tco::*;
