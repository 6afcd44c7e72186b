pub mod cli;
pub mod dims;
pub mod emissions;
pub mod pipeline;
pub mod report;
pub mod table;

