//! Diesel schema for registry persistence.

diesel::table! {
    /// Hospital records.
    hospitals (id) {
        /// Hospital identifier.
        id -> Uuid,
        /// Hospital display name.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Patient records.
    patients (id) {
        /// Patient identifier.
        id -> Uuid,
        /// Patient display name.
        #[max_length = 255]
        name -> Varchar,
        /// Patient sex (canonical storage string).
        #[max_length = 50]
        sex -> Varchar,
        /// Patient date of birth.
        dob -> Date,
    }
}

diesel::table! {
    /// Visit join records linking one hospital and one patient on a date.
    visits (id) {
        /// Store-assigned monotonic visit identifier.
        id -> Int8,
        /// Referenced hospital identifier.
        hospital_id -> Uuid,
        /// Referenced patient identifier.
        patient_id -> Uuid,
        /// Visit date.
        visit_date -> Date,
    }
}

diesel::joinable!(visits -> hospitals (hospital_id));
diesel::joinable!(visits -> patients (patient_id));

diesel::allow_tables_to_appear_in_same_query!(hospitals, patients, visits);
