//! # Test Drive Bookings
//!
//! Persistence for test drive booking requests submitted through the site's
//! booking form. Bookings are stored in a local SQLite database via Turso.

use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use turso::{params, Database};

/// A booking request as submitted by the caller. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub car_make: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl NewBooking {
    /// Validates that every required field is present and non-blank.
    pub fn validate(&self) -> Result<(), ChatError> {
        let required = [
            (&self.name, "Name is required"),
            (&self.phone, "Phone number is required"),
            (&self.car_make, "Car make is required"),
            (&self.car_model, "Car model is required"),
            (&self.date, "Date is required"),
            (&self.time, "Time is required"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(ChatError::InvalidInput(message.to_string()));
            }
        }
        Ok(())
    }
}

/// A persisted booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub car_make: String,
    pub car_model: String,
    pub date: String,
    pub time: String,
    pub created_at: String,
}

const CREATE_BOOKINGS_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS bookings (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        car_make TEXT NOT NULL,
        car_model TEXT NOT NULL,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
";

/// A store for booking records backed by a local SQLite database.
///
/// Holds a `Database` instance managing a connection pool. Cloning shares
/// the same underlying database, so a single store can serve concurrent
/// handlers.
#[derive(Clone)]
pub struct BookingStore {
    db: Database,
}

impl BookingStore {
    /// Creates a new `BookingStore` from a file path, or `:memory:` for an
    /// isolated in-memory database.
    pub async fn new(db_path: &str) -> Result<Self, ChatError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| ChatError::StorageConnection(e.to_string()))?;

        // WAL mode helps concurrency for file-based databases and is a
        // harmless no-op in memory.
        let conn = db
            .connect()
            .map_err(|e| ChatError::StorageConnection(e.to_string()))?;
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| ChatError::StorageConnection(e.to_string()))?;

        Ok(Self { db })
    }

    /// Ensures the bookings table exists. Idempotent, safe on every startup.
    pub async fn initialize_schema(&self) -> Result<(), ChatError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| ChatError::StorageConnection(e.to_string()))?;
        conn.execute(CREATE_BOOKINGS_TABLE_SQL, ())
            .await
            .map_err(|e| ChatError::StorageOperationFailed(e.to_string()))?;
        Ok(())
    }

    /// Validates and persists a booking, returning the stored record with its
    /// generated id and creation timestamp.
    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking, ChatError> {
        new_booking.validate()?;

        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            name: new_booking.name,
            phone: new_booking.phone,
            car_make: new_booking.car_make,
            car_model: new_booking.car_model,
            date: new_booking.date,
            time: new_booking.time,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let conn = self
            .db
            .connect()
            .map_err(|e| ChatError::StorageConnection(e.to_string()))?;
        conn.execute(
            "INSERT INTO bookings (id, name, phone, car_make, car_model, date, time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                booking.id.clone(),
                booking.name.clone(),
                booking.phone.clone(),
                booking.car_make.clone(),
                booking.car_model.clone(),
                booking.date.clone(),
                booking.time.clone(),
                booking.created_at.clone()
            ],
        )
        .await
        .map_err(|e| ChatError::StorageOperationFailed(e.to_string()))?;

        Ok(booking)
    }

    /// Returns all bookings, newest first.
    pub async fn list(&self) -> Result<Vec<Booking>, ChatError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| ChatError::StorageConnection(e.to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, name, phone, car_make, car_model, date, time, created_at
                 FROM bookings ORDER BY created_at DESC",
            )
            .await
            .map_err(|e| ChatError::StorageOperationFailed(e.to_string()))?;
        let mut rows = stmt
            .query(())
            .await
            .map_err(|e| ChatError::StorageOperationFailed(e.to_string()))?;

        let mut bookings = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| ChatError::StorageOperationFailed(e.to_string()))?
        {
            bookings.push(Booking {
                id: row.get(0).map_err(storage_err)?,
                name: row.get(1).map_err(storage_err)?,
                phone: row.get(2).map_err(storage_err)?,
                car_make: row.get(3).map_err(storage_err)?,
                car_model: row.get(4).map_err(storage_err)?,
                date: row.get(5).map_err(storage_err)?,
                time: row.get(6).map_err(storage_err)?,
                created_at: row.get(7).map_err(storage_err)?,
            });
        }

        Ok(bookings)
    }
}

fn storage_err(e: turso::Error) -> ChatError {
    ChatError::StorageOperationFailed(e.to_string())
}
