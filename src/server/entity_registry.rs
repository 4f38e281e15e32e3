//! Entity registry for managing entity descriptors and their CRUD routes

use axum::Router;

/// Trait that describes how to build routes for an entity
///
/// Each resource (Dish, Order) implements this trait to provide its routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form, which is also the route prefix (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET /{plural}
    /// - POST /{plural}
    /// - GET /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
///
/// Registering the same entity type twice replaces the earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        self.descriptors
            .retain(|held| held.entity_type() != descriptor.entity_type());
        tracing::debug!(
            entity_type = descriptor.entity_type(),
            plural = descriptor.plural(),
            "entity registered"
        );
        self.descriptors.push(descriptor);
    }

    /// Build a router merging every registered entity's routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }
}
