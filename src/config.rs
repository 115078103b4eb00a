//! Creation parameters shared by every container.

use crate::error::{Error, Result};

/// Parameters for creating a container.
///
/// ```
/// use ringvec::{Config, RingQueue};
///
/// let config = Config::new(4, 8).with_max_capacity(64);
/// let queue = RingQueue::with_config(&config).unwrap();
/// assert_eq!(queue.capacity(), 8);
/// assert_eq!(queue.max_capacity(), 64);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Width of one element in bytes. Fixed for the container's lifetime.
    pub elem_size: usize,
    /// Number of element slots allocated up front.
    pub initial_capacity: usize,
    /// Upper bound on the number of slots growth may reach.
    pub max_capacity: Option<usize>,
}

impl Config {
    /// Config with no limit other than the address space.
    pub fn new(elem_size: usize, initial_capacity: usize) -> Config {
        Config {
            elem_size,
            initial_capacity,
            max_capacity: None,
        }
    }

    /// Caps growth at `max_capacity` elements.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Config {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `elem_size` or `initial_capacity` is zero, or if
    /// the initial capacity is above the limit.
    pub fn validate(&self) -> Result<()> {
        if self.elem_size == 0 {
            return Err(Error::invalid_arg("elem_size", "must be greater than zero"));
        }
        if self.initial_capacity == 0 {
            return Err(Error::invalid_arg(
                "initial_capacity",
                "must be greater than zero",
            ));
        }
        let limit = self.capacity_limit();
        if self.initial_capacity > limit {
            return Err(Error::invalid_arg(
                "initial_capacity",
                format!("{} exceeds the limit of {} elements", self.initial_capacity, limit),
            ));
        }
        Ok(())
    }

    /// Largest element count a buffer built from this config may hold.
    ///
    /// `capacity * elem_size` never overflows below this limit.
    pub fn capacity_limit(&self) -> usize {
        let addressable = usize::MAX / self.elem_size.max(1);
        match self.max_capacity {
            Some(max) => max.min(addressable),
            None => addressable,
        }
    }
}
