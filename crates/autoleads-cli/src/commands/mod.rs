pub mod dispatch;
pub mod generate;
pub mod run;
pub mod topics;
