//! # seedframe: metadata-driven mock data seeding
//!
//! Synthesizes a self-consistent mock dataset across interrelated entity
//! types and hands it to a persistence sink, for development and test
//! environments that need realistic-looking data without handwritten
//! fixtures.
//!
//! The integration layer describes its data model once as
//! [`EntityDescriptor`]s with explicit relationship-kind tags; the
//! [`Seeder`] then orders types by singular-reference dependencies,
//! creates instances with scalar values from a [`ValueSource`], repairs
//! references left unset by cycles, derives one-to-many collections by
//! inverting back-references, and assigns bounded random many-to-many
//! subsets.
//!
//! ```
//! use seedframe::{
//!     EntityDescriptor, FieldDescriptor, MemorySink, SeedConfig, Seeder,
//! };
//!
//! let catalog = vec![
//!     EntityDescriptor::new("author")
//!         .field(FieldDescriptor::identity("id"))
//!         .field(FieldDescriptor::text("name"))
//!         .field(FieldDescriptor::collection("books", "book")),
//!     EntityDescriptor::new("book")
//!         .field(FieldDescriptor::identity("id"))
//!         .field(FieldDescriptor::text("title"))
//!         .field(FieldDescriptor::singular_reference("author", "author")),
//! ];
//!
//! let mut seeder = Seeder::new(&catalog, SeedConfig::default(), MemorySink::new())
//!     .unwrap()
//!     .with_seed(42)
//!     .with_target_count(10);
//! let report = seeder.seed_all().unwrap();
//! assert_eq!(report.created(&"book".into()), 10);
//! ```

pub mod config;
pub mod error;
pub mod instance;
pub mod pool;
pub mod report;
pub mod schema;
pub mod seeder;
pub mod sink;
pub mod value;

pub use config::{ScaleTier, SeedConfig, ValueSourceKind};
pub use error::{SeedError, SeedResult};
pub use instance::{FieldValue, Instance, InstanceId};
pub use pool::InstancePool;
pub use report::{EntityReport, SeedReport};
pub use schema::{
    EntityDescriptor, EntityId, FieldDescriptor, FieldKind, ScalarType, Schema, SchemaCatalog,
};
pub use seeder::{creation_order, Seeder};
pub use sink::{MemorySink, PersistenceSink};
pub use value::{
    EnglishText, RandomValueSource, SemanticValueSource, TextGenerator, ValueSource,
};
