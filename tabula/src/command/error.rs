use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Incorrect number of parameters. Expected {expected}, but is {actual}"))]
    IncorrectNumberOfParameters { expected: usize, actual: usize },

    #[snafu(display("Command '{command}' is not supported"))]
    UnknownCommand { command: String },

    #[snafu(display("{source}"))]
    DataSource { source: crate::datasource::Error },

    #[snafu(display("{source}"))]
    Output { source: crate::sink::Error },
}
