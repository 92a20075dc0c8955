use super::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Read and write operators as JSON files
pub trait OperatorJSONReadWrite: Sized {
    /// write the operator data to a file in JSON format
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    /// read an operator from a JSON file.  The data are validated
    /// exactly as by the operator constructors.
    fn load_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// Only the user supplied data are written.  Loading goes
// back through the constructors, so files are revalidated.

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
enum JsonOperatorData<T: FloatT> {
    Dense { n: usize, data: Vec<T> },
    Tridiagonal { diag: Vec<T>, sub: Vec<T>, sup: Vec<T> },
}

impl<T> OperatorJSONReadWrite for SupportedOperator<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = match self {
            SupportedOperator::DenseOperator(op) => JsonOperatorData::Dense {
                n: op.dim(),
                data: op.data().to_vec(),
            },
            SupportedOperator::TridiagonalOperator(op) => JsonOperatorData::Tridiagonal {
                diag: op.diag().to_vec(),
                sub: op.sub().to_vec(),
                sup: op.sup().to_vec(),
            },
        };

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonOperatorData<T> = serde_json::from_str(&buffer)?;

        // create an operator object
        let op: Self = match json_data {
            JsonOperatorData::Dense { n, data } => DenseOperator::new(n, data)?.into(),
            JsonOperatorData::Tridiagonal { diag, sub, sup } => {
                TridiagonalOperator::new(diag, sub, sup)?.into()
            }
        };

        Ok(op)
    }
}

impl From<OperatorError> for io::Error {
    fn from(e: OperatorError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let op: SupportedOperator<f64> =
        TridiagonalOperator::<f64>::new(vec![3., 6., 3.], vec![-2., -1.], vec![1., 2.])
            .unwrap()
            .into();

    let mut file = tempfile::tempfile().unwrap();
    op.save_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let op2 = SupportedOperator::<f64>::load_from_file(&mut file).unwrap();

    let SupportedOperator::TridiagonalOperator(op2) = op2 else {
        panic!("expected a tridiagonal operator");
    };
    assert_eq!(op2.diag(), &[3., 6., 3.]);
    assert_eq!(op2.sub(), &[-2., -1.]);
    assert_eq!(op2.sup(), &[1., 2.]);
}

#[test]
fn test_json_invalid_data() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(br#"{"Dense":{"n":2,"data":[1.0,2.0,3.0]}}"#)
        .unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = SupportedOperator::<f64>::load_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
