#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::HeaderId;

#[cfg(feature = "std")]
pub(crate) type IdMap<V> = HashMap<HeaderId, V>;
#[cfg(not(feature = "std"))]
pub(crate) type IdMap<V> = BTreeMap<HeaderId, V>;
