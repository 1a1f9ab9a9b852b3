//! Indonesian administrative regions (wilayah) proxy.
//!
//! Forwards listing requests to the public api-wilayah-indonesia dataset and
//! relays the JSON body untouched. Any failure becomes a 500 with
//! `{"message": "Internal Server Error"}`.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota)
//! - Level 3: Districts (Kecamatan)
//! - Level 4: Villages (Kelurahan/Desa)
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions/provinces` | List all provinces |
//! | GET | `/regions/regencies?city={province_id}` | List regencies in a province |
//! | GET | `/regions/districts?districts={regency_id}` | List districts in a regency |
//! | GET | `/regions/villages?villages={district_id}` | List villages in a district |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{RegionService, RegionSource};
