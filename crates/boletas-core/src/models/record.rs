//! Settlement record and batch models.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::{Deserialize, Serialize as DeriveSerialize};

/// Marker written into the check code of a record whose document failed.
pub const ERROR_MARKER: &str = "(error)";

/// A column of the fixed settlement schema, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeriveSerialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Instrument number, e.g. `E-CHEQ 12345`.
    CheckNumber,
    /// Due date of the instrument (`DD/MM/YYYY`).
    DueDate,
    /// Face value of the instrument.
    CheckAmount,
    /// Settlement amount before fees and VAT.
    AmountBeforeFees,
    /// Settlement ticket code, e.g. `BOL 1234567890`.
    CheckCode,
    /// Date of the settlement notice (`DD/MM/YYYY`).
    DocumentDate,
    /// Net amount credited to the account.
    AmountCredited,
    /// Check amount minus amount credited.
    CheckAmountDifference,
    /// Amount before fees minus amount credited.
    BeforeCreditedDifference,
    /// Check-amount difference minus before/credited difference.
    Remainder,
}

impl Field {
    /// Number of columns in the schema.
    pub const COUNT: usize = 10;

    /// All fields in schema order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::CheckNumber,
        Field::DueDate,
        Field::CheckAmount,
        Field::AmountBeforeFees,
        Field::CheckCode,
        Field::DocumentDate,
        Field::AmountCredited,
        Field::CheckAmountDifference,
        Field::BeforeCreditedDifference,
        Field::Remainder,
    ];

    /// Position of the field in the schema.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Machine-friendly key used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Field::CheckNumber => "check_number",
            Field::DueDate => "due_date",
            Field::CheckAmount => "check_amount",
            Field::AmountBeforeFees => "amount_before_fees",
            Field::CheckCode => "check_code",
            Field::DocumentDate => "document_date",
            Field::AmountCredited => "amount_credited",
            Field::CheckAmountDifference => "check_amount_difference",
            Field::BeforeCreditedDifference => "before_credited_difference",
            Field::Remainder => "remainder",
        }
    }

    /// Column header.
    pub fn label(self) -> &'static str {
        match self {
            Field::CheckNumber => "Check number",
            Field::DueDate => "Due date",
            Field::CheckAmount => "Check amount",
            Field::AmountBeforeFees => "Amount before fees/VAT",
            Field::CheckCode => "Check code",
            Field::DocumentDate => "Document date",
            Field::AmountCredited => "Amount to be credited",
            Field::CheckAmountDifference => "Check-amount difference",
            Field::BeforeCreditedDifference => "Difference (before - credited)",
            Field::Remainder => "Remainder",
        }
    }

    /// Column header as printed on the Spanish-language spreadsheets.
    pub fn label_es(self) -> &'static str {
        match self {
            Field::CheckNumber => "Numero de cheque",
            Field::DueDate => "Vencimiento",
            Field::CheckAmount => "Importe del cheque",
            Field::AmountBeforeFees => "Importe antes de aranceles e IVA",
            Field::CheckCode => "Codigo de boleto",
            Field::DocumentDate => "Fecha de boleto",
            Field::AmountCredited => "Importe a acreditar",
            Field::CheckAmountDifference => "Importe diferencia",
            Field::BeforeCreditedDifference => "Diferencia (antes - acreditar)",
            Field::Remainder => "Resta: Importe diferencia - Diferencia (antes - acreditar)",
        }
    }
}

/// One row of extracted and derived fields for a single document.
///
/// Every schema field is always present; a field that could not be found
/// holds an empty string. Values are display strings, never raw matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    values: [String; Field::COUNT],
}

impl ExtractedRecord {
    /// Create a record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record substituted for a document that could not be processed.
    pub fn failed(file_name: &str) -> Self {
        let mut record = Self::new();
        record.set(Field::CheckCode, format!("{} {}", ERROR_MARKER, file_name));
        record
    }

    /// Value of a field (empty when not found).
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Whether a field is still empty.
    pub fn is_empty(&self, field: Field) -> bool {
        self.values[field.index()].is_empty()
    }

    /// Whether this record stands in for a failed document.
    pub fn is_error(&self) -> bool {
        self.get(Field::CheckCode).starts_with(ERROR_MARKER)
    }

    /// Fields and values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Values in schema order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Set a field only if it is still empty. Returns true if it was filled.
    pub(crate) fn fill(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_empty(field) {
            self.set(field, value);
            true
        } else {
            false
        }
    }
}

impl Serialize for ExtractedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, DeriveSerialize)]
pub struct BatchFailure {
    /// Position of the document in the input.
    pub index: usize,
    /// File name of the document.
    pub file_name: String,
    /// Error that caused the substitution.
    pub error: String,
}

/// Records for a batch of documents, one per input, in input order.
#[derive(Debug, Clone, Default, DeriveSerialize)]
pub struct BatchResult {
    records: Vec<ExtractedRecord>,
    failures: Vec<BatchFailure>,
}

impl BatchResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            failures: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: ExtractedRecord) {
        self.records.push(record);
    }

    pub(crate) fn push_failure(&mut self, file_name: &str, error: String) {
        let index = self.records.len();
        self.failures.push(BatchFailure {
            index,
            file_name: file_name.to_string(),
            error,
        });
        self.records.push(ExtractedRecord::failed(file_name));
    }

    /// Records in input order.
    pub fn records(&self) -> &[ExtractedRecord] {
        &self.records
    }

    /// Documents that were replaced by error records.
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    /// Number of records (equal to the number of input documents).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedRecord> {
        self.records.iter()
    }
}

impl FromIterator<ExtractedRecord> for BatchResult {
    fn from_iter<I: IntoIterator<Item = ExtractedRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
            failures: Vec::new(),
        }
    }
}
