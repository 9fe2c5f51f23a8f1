pub use sla_math as math;
