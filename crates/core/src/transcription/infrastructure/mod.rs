pub mod whisper_command_transcriber;
