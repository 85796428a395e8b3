pub mod client;
pub mod product {
    pub mod dto;
    pub mod gateway;
}
