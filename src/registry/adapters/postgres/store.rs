//! `PostgreSQL` store implementation for the registry.

use super::{
    models::{HospitalRow, NewVisitRow, PatientRow, VisitRow},
    schema::{hospitals, patients, visits},
};
use crate::registry::{
    domain::{
        Hospital, HospitalId, NewVisit, Patient, PatientId, Sex, Visit, VisitId,
    },
    ports::{RegistryStore, RegistryStoreError, RegistryStoreResult},
};
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by registry adapters.
pub type RegistryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed registry store.
///
/// The visit table's serial primary key supplies the monotonic, store-assigned
/// visit identifiers; queries over it order by that key so the insertion order
/// contract of the port holds.
#[derive(Debug, Clone)]
pub struct PostgresRegistryStore {
    pool: RegistryPgPool,
}

impl PostgresRegistryStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RegistryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RegistryStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RegistryStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RegistryStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RegistryStoreError::persistence)?
    }
}

#[async_trait]
impl RegistryStore for PostgresRegistryStore {
    async fn upsert_hospital(&self, hospital: &Hospital) -> RegistryStoreResult<()> {
        let row = hospital_to_row(hospital);
        self.run_blocking(move |connection| {
            diesel::insert_into(hospitals::table)
                .values(&row)
                .on_conflict(hospitals::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(RegistryStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_hospital(&self, id: HospitalId) -> RegistryStoreResult<Option<Hospital>> {
        self.run_blocking(move |connection| {
            let row = hospitals::table
                .filter(hospitals::id.eq(id.into_inner()))
                .select(HospitalRow::as_select())
                .first::<HospitalRow>(connection)
                .optional()
                .map_err(RegistryStoreError::persistence)?;
            row.map(row_to_hospital).transpose()
        })
        .await
    }

    async fn hospital_exists(&self, id: HospitalId) -> RegistryStoreResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(exists(
                hospitals::table.filter(hospitals::id.eq(id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(RegistryStoreError::persistence)
        })
        .await
    }

    async fn delete_hospital(&self, id: HospitalId) -> RegistryStoreResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(
                hospitals::table.filter(hospitals::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(RegistryStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn list_hospitals(&self) -> RegistryStoreResult<Vec<Hospital>> {
        self.run_blocking(move |connection| {
            let rows = hospitals::table
                .select(HospitalRow::as_select())
                .load::<HospitalRow>(connection)
                .map_err(RegistryStoreError::persistence)?;
            rows.into_iter().map(row_to_hospital).collect()
        })
        .await
    }

    async fn upsert_patient(&self, patient: &Patient) -> RegistryStoreResult<()> {
        let row = patient_to_row(patient);
        self.run_blocking(move |connection| {
            diesel::insert_into(patients::table)
                .values(&row)
                .on_conflict(patients::id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(RegistryStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_patient(&self, id: PatientId) -> RegistryStoreResult<Option<Patient>> {
        self.run_blocking(move |connection| {
            let row = patients::table
                .filter(patients::id.eq(id.into_inner()))
                .select(PatientRow::as_select())
                .first::<PatientRow>(connection)
                .optional()
                .map_err(RegistryStoreError::persistence)?;
            row.map(row_to_patient).transpose()
        })
        .await
    }

    async fn patient_exists(&self, id: PatientId) -> RegistryStoreResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(exists(
                patients::table.filter(patients::id.eq(id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(RegistryStoreError::persistence)
        })
        .await
    }

    async fn delete_patient(&self, id: PatientId) -> RegistryStoreResult<bool> {
        self.run_blocking(move |connection| {
            let removed =
                diesel::delete(patients::table.filter(patients::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(RegistryStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn list_patients(&self) -> RegistryStoreResult<Vec<Patient>> {
        self.run_blocking(move |connection| {
            let rows = patients::table
                .select(PatientRow::as_select())
                .load::<PatientRow>(connection)
                .map_err(RegistryStoreError::persistence)?;
            rows.into_iter().map(row_to_patient).collect()
        })
        .await
    }

    async fn insert_visit(&self, record: NewVisit) -> RegistryStoreResult<Visit> {
        let new_row = NewVisitRow {
            hospital_id: record.hospital().into_inner(),
            patient_id: record.patient().into_inner(),
            visit_date: record.visit_date(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(visits::table)
                .values(&new_row)
                .returning(VisitRow::as_select())
                .get_result::<VisitRow>(connection)
                .map_err(RegistryStoreError::persistence)?;
            Ok(row_to_visit(row))
        })
        .await
    }

    async fn visits_by_hospital(&self, id: HospitalId) -> RegistryStoreResult<Vec<Visit>> {
        self.run_blocking(move |connection| {
            let rows = visits::table
                .filter(visits::hospital_id.eq(id.into_inner()))
                .order(visits::id.asc())
                .select(VisitRow::as_select())
                .load::<VisitRow>(connection)
                .map_err(RegistryStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_visit).collect())
        })
        .await
    }

    async fn visits_by_patient(&self, id: PatientId) -> RegistryStoreResult<Vec<Visit>> {
        self.run_blocking(move |connection| {
            let rows = visits::table
                .filter(visits::patient_id.eq(id.into_inner()))
                .order(visits::id.asc())
                .select(VisitRow::as_select())
                .load::<VisitRow>(connection)
                .map_err(RegistryStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_visit).collect())
        })
        .await
    }

    async fn distinct_hospitals_of_patient(
        &self,
        id: PatientId,
    ) -> RegistryStoreResult<Vec<Hospital>> {
        self.run_blocking(move |connection| {
            let rows = visits::table
                .inner_join(hospitals::table)
                .filter(visits::patient_id.eq(id.into_inner()))
                .select(HospitalRow::as_select())
                .distinct()
                .load::<HospitalRow>(connection)
                .map_err(RegistryStoreError::persistence)?;
            rows.into_iter().map(row_to_hospital).collect()
        })
        .await
    }
}

fn hospital_to_row(hospital: &Hospital) -> HospitalRow {
    HospitalRow {
        id: hospital.id().into_inner(),
        name: hospital.name().to_owned(),
    }
}

fn row_to_hospital(row: HospitalRow) -> RegistryStoreResult<Hospital> {
    Hospital::from_persisted(HospitalId::from_uuid(row.id), row.name)
        .map_err(RegistryStoreError::invalid_persisted_data)
}

fn patient_to_row(patient: &Patient) -> PatientRow {
    PatientRow {
        id: patient.id().into_inner(),
        name: patient.name().to_owned(),
        sex: patient.sex().as_str().to_owned(),
        dob: patient.dob(),
    }
}

fn row_to_patient(row: PatientRow) -> RegistryStoreResult<Patient> {
    let sex = Sex::try_from(row.sex.as_str())
        .map_err(RegistryStoreError::invalid_persisted_data)?;
    Patient::from_persisted(PatientId::from_uuid(row.id), row.name, sex, row.dob)
        .map_err(RegistryStoreError::invalid_persisted_data)
}

fn row_to_visit(row: VisitRow) -> Visit {
    Visit::from_persisted(
        VisitId::from_i64(row.id),
        NewVisit::new(
            HospitalId::from_uuid(row.hospital_id),
            PatientId::from_uuid(row.patient_id),
            row.visit_date,
        ),
    )
}
