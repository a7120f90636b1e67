/// Appointment slots offered for booking.
pub const SESSION_SLOTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];

/// Fields a booking request must carry, checked in this order.
///
/// Only key presence is checked; values are not inspected.
pub const REQUIRED_BOOKING_FIELDS: [&str; 10] = [
    "hospital_name",
    "username",
    "age",
    "sex",
    "issue",
    "date",
    "session",
    "note",
    "city",
    "contact_email",
];
