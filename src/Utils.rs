//! different utility modules used throughout the project
/// logger set-up and CSV export of mesh samples
pub mod logger;
/// PNG plots of two curves on one chart
pub mod plots;
/// text tables and lines with error estimates
pub mod report;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into a TaskDocument
pub mod task_parser;
///
mod task_parser_tests;
