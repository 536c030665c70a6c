/// Utility modules for corpus analyzer
///
/// This module contains utility functions for loading word lists and for
/// formatting and exporting reports.

pub mod file_utils;
pub mod output_formatter;
