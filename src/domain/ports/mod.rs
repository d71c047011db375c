mod address_provider;

pub use address_provider::AddressProvider;
