//! Zero-Cost Safety Macros
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Only use on indices that are validated once up front, e.g. spring endpoints,
//! which are checked against the point array when a soft body is built.
//!
//! Usage:
//! ```rust
//! use softine_engine::fast;
//!
//! let endpoint = 2;
//!
//! let rest = vec![10.0f32, 12.5, 8.0];
//! // Read: fast!(slice, [index])
//! let len = *fast!(rest, [endpoint]);
//! assert_eq!(len, 8.0);
//!
//! let mut accel = vec![0.0f32; 3];
//! // Write: fast!(slice, [index] = value)
//! fast!(accel, [endpoint] = 9.5);
//! assert_eq!(accel[endpoint], 9.5);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! fast {
    // Mutable borrow: fast!(mut slice, [index])
    (mut $slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &mut $slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked_mut($index) }
        }
    }};

    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_and_write() {
        let mut arr = vec![1.0f32, 2.0, 3.0];
        assert_eq!(*fast!(arr, [1]), 2.0);
        fast!(arr, [1] = 7.0);
        *fast!(mut arr, [2]) += 1.0;
        assert_eq!(arr, vec![1.0, 7.0, 4.0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_bounds_check_debug() {
        let arr = vec![1, 2, 3];
        let _ = *fast!(arr, [10]);
    }
}
