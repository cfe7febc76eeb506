//! The fixed set of supported sorting algorithms.
//!
//! Callers select an algorithm either as a typed [`Algorithm`] value or by
//! name via [`Algorithm::from_name`]. Name parsing happens before any
//! sequence access, so an unknown name can never leave a partial mutation
//! behind.

use serde::{Deserialize, Serialize};

/// The six supported algorithms, in UI listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// All algorithms, in the order the selector presents them.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Human-readable name shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
            Algorithm::Heap => "Heap sort",
        }
    }

    /// Parse an algorithm identifier. Accepts the selector label
    /// ("Bubble sort"), the identifier form ("BubbleSort"), and the bare
    /// lowercase name ("bubble").
    pub fn from_name(name: &str) -> Result<Algorithm, SortError> {
        match name {
            "Bubble sort" | "BubbleSort" | "bubble" => Ok(Algorithm::Bubble),
            "Selection sort" | "SelectionSort" | "selection" => Ok(Algorithm::Selection),
            "Insertion sort" | "InsertionSort" | "insertion" => Ok(Algorithm::Insertion),
            "Merge sort" | "MergeSort" | "merge" => Ok(Algorithm::Merge),
            "Quick sort" | "QuickSort" | "quick" => Ok(Algorithm::Quick),
            "Heap sort" | "HeapSort" | "heap" => Ok(Algorithm::Heap),
            _ => Err(SortError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }
}

/// Errors from the sort engine. Algorithms themselves are total over any
/// finite sequence, so the only failure is selecting one that doesn't exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The requested algorithm identifier is not one of the six.
    #[error("unknown sorting algorithm '{name}'")]
    UnknownAlgorithm { name: String },
}
