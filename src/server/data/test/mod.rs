mod attendance_log;
