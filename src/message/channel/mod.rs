#![doc = r#"
Contains all Channel Message types

# Hierarchy
```text
                |-----------------|
                | Channel Message |
                |-----------------|
                 /               \
|-----------------------|   |----------------------|
| Channel Voice Message |   | Channel Mode Message |
|-----------------------|   |----------------------|
```

Channel mode messages share their status with Control Change
(controllers `120-127`), so they are written as a [`VoiceEvent::ControlChange`].
[`ChannelModeMessage`] names them when inspecting an event.
"#]
mod mode;
pub use mode::*;

mod voice;
pub use voice::*;
