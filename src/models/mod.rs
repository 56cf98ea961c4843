pub mod category;
pub mod coordinates;
pub mod place;
pub mod route;

pub use category::Category;
pub use coordinates::Coordinates;
pub use place::PlaceOfInterest;
pub use route::{AlternativeScore, RouteAlternative, RouteSummary, SelectionResult};
