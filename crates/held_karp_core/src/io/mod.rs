pub(crate) mod input;
pub(crate) mod labels;
pub(crate) mod options;
pub(crate) mod report;
