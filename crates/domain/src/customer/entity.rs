//! Customer entity.

use common::EntityId;

use crate::value_objects::Money;

use super::{Address, CustomerError, CustomerEvent};

/// Customer entity.
///
/// Operations that change the customer in a way other contexts care about
/// record a [`CustomerEvent`]; callers drain them with
/// [`Customer::take_events`] and hand them to an event dispatcher.
#[derive(Debug, Clone)]
pub struct Customer {
    id: EntityId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: Money,
    events: Vec<CustomerEvent>,
}

impl Customer {
    /// Creates an inactive customer without recording any event.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: Money::zero(),
            events: Vec::new(),
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Creates a new customer and records a CustomerCreated event.
    pub fn create(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        address: Option<Address>,
    ) -> Result<Self, CustomerError> {
        let mut customer = Self::new(id, name)?;
        customer.address = address;
        customer.events.push(CustomerEvent::customer_created(
            customer.id.clone(),
            customer.name.clone(),
            customer.address.clone(),
        ));
        Ok(customer)
    }

    /// Rebuilds a customer from persisted state without recording events.
    pub fn restore(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: Money,
    ) -> Result<Self, CustomerError> {
        let mut customer = Self::new(id, name)?;
        customer.address = address;
        customer.reward_points = reward_points;
        if active {
            customer.activate()?;
        }
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }
}

// Query methods
impl Customer {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> Money {
        self.reward_points
    }

    /// Returns events recorded since the last [`Customer::take_events`].
    pub fn pending_events(&self) -> &[CustomerEvent] {
        &self.events
    }
}

// Mutations
impl Customer {
    /// Renames the customer.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Moves the customer to a new address and records a CustomerAddressChanged event.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address.clone());
        self.events.push(CustomerEvent::customer_address_changed(
            self.id.clone(),
            self.name.clone(),
            address,
        ));
    }

    /// Activates the customer. Requires an address.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credits reward points to the customer.
    pub fn add_reward_points(&mut self, points: Money) {
        self.reward_points += points;
    }

    /// Drains the recorded events.
    pub fn take_events(&mut self) -> Vec<CustomerEvent> {
        std::mem::take(&mut self.events)
    }
}
