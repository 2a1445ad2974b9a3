pub mod lww_g_set;
pub mod lww_set;

pub use lww_g_set::LwwGSet;
pub use lww_set::LwwSet;

//state-based merge. implementations must be commutative, associative and
//idempotent so that replicas converge no matter how merges are ordered,
//duplicated or retried.
pub trait Merge {
    fn merge(&mut self, other: &Self);
}
