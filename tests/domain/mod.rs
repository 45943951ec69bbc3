mod audio_clip_test;
mod normalized_audio_test;
