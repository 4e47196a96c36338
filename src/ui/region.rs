use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A page element whose inner markup is replaced wholesale.
pub trait DisplayRegion: Send + Sync {
    fn replace_html(&self, html: String);
}

/// The four dashboard counters, keyed by element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    TotalUsers,
    TotalProducts,
    TotalUploads,
    TotalActivities,
}

impl Counter {
    pub fn element_id(self) -> &'static str {
        match self {
            Counter::TotalUsers => "total-users",
            Counter::TotalProducts => "total-products",
            Counter::TotalUploads => "total-uploads",
            Counter::TotalActivities => "total-activities",
        }
    }
}

pub trait CounterSink: Send + Sync {
    fn set_counter(&self, counter: Counter, text: String);
}

/// In-memory region, used by the binary and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    html: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> Option<String> {
        self.html.lock().ok().and_then(|h| h.clone())
    }

    pub fn writes(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }
}

impl DisplayRegion for MemoryRegion {
    fn replace_html(&self, html: String) {
        if let Ok(mut current) = self.html.lock() {
            *current = Some(html);
        }
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCounters {
    values: Arc<Mutex<HashMap<Counter, String>>>,
}

impl MemoryCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, counter: Counter) -> Option<String> {
        self.values.lock().ok().and_then(|v| v.get(&counter).cloned())
    }
}

impl CounterSink for MemoryCounters {
    fn set_counter(&self, counter: Counter, text: String) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(counter, text);
        }
    }
}
