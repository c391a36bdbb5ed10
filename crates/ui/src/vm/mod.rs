mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    OptionVm, QuestionVm, QuizIntent, QuizScreenVm, QuizVm, ResultsVm, ReviewItemVm,
};
pub use time_fmt::format_seconds_left;
