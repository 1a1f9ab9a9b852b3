//! Sample records loaded into the in-memory dataset at startup

use crate::features::residents::models::{Gender, ResidentRecord};

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    national_id: &str,
    family_card_id: &str,
    age: u32,
    gender: Gender,
    region: [&str; 4],
    address: &str,
    rt_rw: (&str, &str),
    income: (u64, u64),
    reason: &str,
) -> ResidentRecord {
    let [province_id, regency_id, district_id, village_id] = region;
    ResidentRecord {
        name: name.to_string(),
        national_id: national_id.to_string(),
        family_card_id: family_card_id.to_string(),
        age,
        gender,
        province_id: province_id.to_string(),
        regency_id: regency_id.to_string(),
        district_id: district_id.to_string(),
        village_id: village_id.to_string(),
        address: address.to_string(),
        rt: rt_rw.0.to_string(),
        rw: rt_rw.1.to_string(),
        income_before: income.0,
        income_after: income.1,
        reason: reason.to_string(),
    }
}

pub fn seed_records() -> Vec<ResidentRecord> {
    vec![
        record(
            "Budi Santoso",
            "3273011204800001",
            "3273010101080001",
            44,
            Gender::Male,
            ["32", "3273", "3273010", "3273010001"],
            "Jl. Sukajadi No. 12",
            ("003", "005"),
            (6_500_000, 4_000_000),
            "Kehilangan pekerjaan",
        ),
        record(
            "Siti Rahmawati",
            "3171014507850002",
            "3171010202090002",
            39,
            Gender::Female,
            ["31", "3171", "3171010", "3171010001"],
            "Jl. Tebet Barat Dalam II No. 7",
            ("001", "002"),
            (8_000_000, 5_500_000),
            "Usaha katering tutup sementara",
        ),
        record(
            "Agus Wijaya",
            "3578010906700003",
            "3578010303070003",
            54,
            Gender::Male,
            ["35", "3578", "3578010", "3578010001"],
            "Jl. Kalianak Timur No. 45",
            ("004", "001"),
            (4_200_000, 2_100_000),
            "Pengurangan jam kerja",
        ),
        record(
            "Dewi Lestari",
            "3404016612900004",
            "3404010404150004",
            33,
            Gender::Female,
            ["34", "3404", "3404010", "3404010001"],
            "Perum Griya Asri Blok C-3",
            ("002", "008"),
            (5_000_000, 5_000_000),
            "Penghasilan tidak menentu",
        ),
    ]
}
