// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Driver event log.
//!
//! Fixed-capacity ring of formatted records, no allocation. The host kernel
//! drains it or installs a sink to forward records (serial, its own logger).

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use heapless::{Deque, String};
use spin::Mutex;

pub const LOG_CAPACITY: usize = 64;
pub const MESSAGE_LEN: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub sequence: u64,
    pub severity: Severity,
    pub message: String<MESSAGE_LEN>,
}

pub type LogSink = fn(Severity, &str);

pub struct Logger {
    entries: Mutex<Deque<LogEntry, LOG_CAPACITY>>,
    sequence: AtomicU64,
    min_level: Mutex<Severity>,
    sink: Mutex<Option<LogSink>>,
    in_sink: AtomicBool,
}

pub static LOGGER: Logger = Logger::new();

impl Logger {
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Deque::new()),
            sequence: AtomicU64::new(0),
            min_level: Mutex::new(Severity::Info),
            sink: Mutex::new(None),
            in_sink: AtomicBool::new(false),
        }
    }

    pub fn set_min_level(&self, level: Severity) {
        *self.min_level.lock() = level;
    }

    pub fn min_level(&self) -> Severity {
        *self.min_level.lock()
    }

    /// The sink runs synchronously on the logging path, possibly while the
    /// caller holds the terminal. Records logged from inside the sink are
    /// buffered but not forwarded again.
    pub fn set_sink(&self, sink: Option<LogSink>) {
        *self.sink.lock() = sink;
    }

    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if severity < self.min_level() {
            return;
        }

        // Fragments that no longer fit are dropped.
        let mut message: String<MESSAGE_LEN> = String::new();
        let _ = message.write_fmt(args);

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        {
            let mut entries = self.entries.lock();
            if entries.is_full() {
                let _ = entries.pop_front();
            }
            let _ = entries.push_back(LogEntry { sequence, severity, message: message.clone() });
        }

        let sink = *self.sink.lock();
        if let Some(sink) = sink {
            if !self.in_sink.swap(true, Ordering::Acquire) {
                sink(severity, &message);
                self.in_sink.store(false, Ordering::Release);
            }
        }
    }

    /// True while the sink is running.
    pub fn in_sink(&self) -> bool {
        self.in_sink.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.entries.lock().back().cloned()
    }

    /// Hands every buffered record to `f`, oldest first, and empties the ring.
    pub fn drain(&self, mut f: impl FnMut(&LogEntry)) {
        let mut entries = self.entries.lock();
        while let Some(entry) = entries.pop_front() {
            f(&entry);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

pub fn log(severity: Severity, args: fmt::Arguments<'_>) {
    LOGGER.log(severity, args);
}

macro_rules! log_dbg {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::Severity::Debug, format_args!($($arg)*))
    };
}

macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::Severity::Info, format_args!($($arg)*))
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log::log($crate::log::Severity::Warn, format_args!($($arg)*))
    };
}

pub(crate) use {log_dbg, log_info, log_warn};
