//! Shared test harness modules for the hubfreight CLI.

use super::*;

mod helpers;
