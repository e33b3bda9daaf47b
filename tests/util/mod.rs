mod notification;
