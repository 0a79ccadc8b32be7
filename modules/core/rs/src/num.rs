use std::fmt::Debug;

/// T values are primitive integers usable as interval coordinates
pub trait PrimInt: ::num::PrimInt + Debug + Default + Send + Sync {}
impl<T: ::num::PrimInt + Debug + Default + Send + Sync> PrimInt for T {}
