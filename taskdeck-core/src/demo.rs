//! Demo-mode sample records. Only compiled with the `demo` feature so the
//! server can start with a populated store.

use taskdeck_model::{TodoId, TodoRecord};
use tracing::info;
use uuid::Uuid;

use crate::store::{StoreResult, TodoStore};

/// Well-known id of the first sample record.
pub const FIRST_SAMPLE_ID: Uuid =
    Uuid::from_u128(0x073c98bc_4fa0_4ede_b121_6be06c25977f);

const SAMPLES: &[(u128, &str, bool)] = &[
    (0x073c98bc_4fa0_4ede_b121_6be06c25977f, "Buy groceries", false),
    (0x1b0e4c6a_59d4_4f4e_9a55_0c3a51e2a001, "Walk the dog", true),
    (0x2c1f5d7b_6ae5_4a5f_8b66_1d4b62f3b002, "Pay electricity bill", false),
    (0x3d206e8c_7bf6_4b60_9c77_2e5c7304c003, "Grocery list for the weekend", false),
    (0x4e317f9d_8c07_4c71_8d88_3f6d8415d004, "Renew passport", true),
    (0x5f4280ae_9d18_4d82_9e99_407e9526e005, "Clean the garage", false),
    (0x605391bf_ae29_4e93_8faa_518fa637f006, "Return library books", true),
    (0x7164a2c0_bf3a_4fa4_a0bb_62a0b7480007, "Pick up groceries for the party", true),
    (0x8275b3d1_c04b_40b5_b1cc_73b1c8591008, "Schedule dentist appointment", false),
    (0x9386c4e2_d15c_41c6_82dd_84c2d96a2009, "Water the plants", false),
];

pub fn sample_records() -> Vec<TodoRecord> {
    SAMPLES
        .iter()
        .map(|&(id, title, completed)| TodoRecord {
            id: TodoId(Uuid::from_u128(id)),
            title: title.to_string(),
            completed,
        })
        .collect()
}

/// Saves every sample record into `store`, replacing same-id entries.
pub async fn seed(store: &dyn TodoStore) -> StoreResult<usize> {
    let records = sample_records();
    let count = records.len();
    for record in records {
        store.save(record).await?;
    }
    info!(count, "seeded demo todos");
    Ok(count)
}
